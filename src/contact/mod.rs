//! Vendor contact deep links
//!
//! Contacting a vendor happens off-platform over WhatsApp; all this module
//! does is build the `wa.me` deep link the front end opens.

/// Build a WhatsApp deep link for a phone number and optional message.
///
/// Non-digits are stripped from the phone; an empty message omits the
/// `text` parameter entirely.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    let message = message.trim();
    if message.is_empty() {
        format!("https://wa.me/{}", digits)
    } else {
        format!("https://wa.me/{}?text={}", digits, urlencoding::encode(message))
    }
}

/// Default greeting used when the caller supplies no message
pub fn default_greeting(vendor_name: &str) -> String {
    format!("Olá! Vi a {} no app da feira e gostaria de saber mais.", vendor_name)
}
