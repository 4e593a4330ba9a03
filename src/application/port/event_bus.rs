// SPDX-License-Identifier: MPL-2.0
//! Event bus port.

/// Published when the user asks to attach a new file.
pub const ATTACH_IMAGE_EVENT: &str = "attach-image";

/// Fire-and-forget notification sink.
///
/// Publishing never fails from the caller's point of view and no delivery
/// guarantee is assumed.
pub trait EventBus: Send + Sync {
    fn publish(&self, event_name: &str);
}
