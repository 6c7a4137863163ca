//! Registry profile names and the rule deciding who may edit records.

/// Profile carried by registry administrators.
pub const PROFILE_ADMIN: &str = "admin";

/// Profile carried by read-only registry users.
pub const PROFILE_USER: &str = "user";

/// Profiles allowed to create, update and delete horses when no explicit
/// list is configured.
pub const DEFAULT_EDITOR_PROFILES: &[&str] = &[PROFILE_ADMIN];

/// Whether `profile` appears in `editor_profiles`.
///
/// Comparison ignores ASCII case and surrounding whitespace. An empty
/// profile never matches.
pub fn is_editor_profile(profile: &str, editor_profiles: &[String]) -> bool {
    let profile = profile.trim();
    !profile.is_empty()
        && editor_profiles
            .iter()
            .any(|allowed| allowed.trim().eq_ignore_ascii_case(profile))
}
