// ABOUTME: User-facing console lines for the export entry point
// ABOUTME: Formats the account banner and the top-level failure message

use crate::{Error, User};
use std::io::{self, Write};

pub fn write_user_banner<W: Write>(out: &mut W, user: &User) -> io::Result<()> {
    writeln!(
        out,
        "Your username is: {}",
        user.email.as_deref().unwrap_or("N/A")
    )?;
    writeln!(
        out,
        "Your display name is: {}",
        user.display_name.as_deref().unwrap_or("N/A")
    )
}

pub fn describe_failure(err: &Error) -> String {
    if err.is_http_status() {
        format!("HTTP error occurred: {}", err)
    } else {
        format!("An error occurred: {}", err)
    }
}
