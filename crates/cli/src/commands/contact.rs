//! Contact form commands.

use thrift_haven_storefront::contact::{self, ContactForm};
use thrift_haven_storefront::error::Result;

use crate::output;

/// Send a message to the shop.
pub fn send(name: String, email: String, message: String) -> Result<()> {
    let form = ContactForm {
        name,
        email,
        message,
    };
    let confirmation = contact::submit(&form)?;
    output::success(confirmation);
    Ok(())
}
