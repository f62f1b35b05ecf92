/// Router Module Index
///
/// Splits the API by trust level. Admin-only handlers enforce the admin
/// session through the `AdminSession` extractor, so misrouting a handler
/// cannot silently drop its guard.

/// Routes open to every visitor: content reads and the access gate.
pub mod public;

/// Routes under `/admin`: login and session check are open, everything else
/// requires `Authorization: Bearer <admin-session-id>`.
pub mod admin;
