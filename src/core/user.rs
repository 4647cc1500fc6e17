use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("no user database entry for uid {0}")]
    NotFound(u32),
    #[error("user lookup failed: {0}")]
    Lookup(#[from] std::io::Error),
    #[error("home directory not found")]
    HomeDirNotFound,
}

/// Home directory of the invoking user as recorded in the user database.
///
/// Unlike [`home_dir`] this ignores `HOME`, so the prompt reflects the real
/// account even when the variable has been overridden.
#[cfg(unix)]
pub fn current_user_home() -> Result<PathBuf, UserError> {
    use std::ffi::{CStr, OsStr};
    use std::os::unix::ffi::OsStrExt;

    let uid = unsafe { libc::getuid() };
    let mut buf_len = match unsafe { libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX) } {
        n if n > 0 => n as usize,
        _ => 1024,
    };

    loop {
        let mut buf: Vec<libc::c_char> = vec![0; buf_len];
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        let rc = unsafe {
            libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result)
        };

        if rc == libc::ERANGE {
            buf_len *= 2;
            continue;
        }
        if rc != 0 {
            return Err(UserError::Lookup(std::io::Error::from_raw_os_error(rc)));
        }
        if result.is_null() || pwd.pw_dir.is_null() {
            return Err(UserError::NotFound(uid));
        }

        // pw_dir points into `buf`, which is still alive here.
        let dir = unsafe { CStr::from_ptr(pwd.pw_dir) };
        return Ok(PathBuf::from(OsStr::from_bytes(dir.to_bytes())));
    }
}

#[cfg(not(unix))]
pub fn current_user_home() -> Result<PathBuf, UserError> {
    home_dir()
}

/// Home directory for bare `cd`: `HOME` first, then the user database.
pub fn home_dir() -> Result<PathBuf, UserError> {
    dirs::home_dir().ok_or(UserError::HomeDirNotFound)
}
