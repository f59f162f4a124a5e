use anyhow::Result;
use project_records::config::Config;
use project_records_inquiry::{Composer, InquiryForm};

/// Print the mailto URI the contact form would hand to a mail client.
pub fn print(config: &Config, form: InquiryForm) -> Result<()> {
    let composer = Composer::new(config.site.recipient.to_owned());
    let email = composer.submit(&form.normalized(), &config.site.project_types)?;

    println!("{}", email.mailto_uri());

    Ok(())
}
