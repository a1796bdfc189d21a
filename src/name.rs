use crate::Result;
use crate::error::Error;

const MAX_LEN: usize = 100;

/// `HEAD` would collide with the revision git resolves everywhere a name can
/// end up (stash messages, branch names). Branch-like names such as `main`
/// and command words such as `status` are deliberately not reserved.
const RESERVED: &[&str] = &["HEAD"];

/// Check a changelist name. Allowed: 1-100 characters, anything except git's
/// revision metacharacters, ASCII whitespace and control characters; not
/// dots-only.
pub fn validate(name: &str) -> Result<()> {
    let count = name.chars().count();
    if count == 0 || count > MAX_LEN {
        return Err(Error::InvalidName(name.to_string()).into());
    }
    if RESERVED.contains(&name) {
        return Err(Error::InvalidName(name.to_string()).into());
    }
    if name.chars().all(|c| c == '.') {
        return Err(Error::InvalidName(name.to_string()).into());
    }
    if name.chars().any(forbidden) {
        return Err(Error::InvalidName(name.to_string()).into());
    }
    Ok(())
}

fn forbidden(c: char) -> bool {
    // ASCII whitespace only; a Unicode space such as NBSP is a valid
    // name character
    c.is_ascii_whitespace()
        || c.is_control()
        || matches!(c, '/' | '\\' | '@' | ':' | '~' | '^' | '*' | '?' | '[')
}
