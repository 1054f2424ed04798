use std::env;
use std::process;

use smsaero::{ApiKey, Email, MessageText, PhoneNumber, Recipients, SendSmsOptions, SmsAeroClient};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let [email, api_key, phone, message] = args.as_slice() else {
        eprintln!("usage: send_sms <email> <api_key> <phone> <message>");
        process::exit(1);
    };

    if let Err(err) = run(email, api_key, phone, message) {
        eprintln!("An error occurred: {err}");
        process::exit(1);
    }
}

fn run(email: &str, api_key: &str, phone: &str, message: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut client = SmsAeroClient::new(Email::new(email)?, ApiKey::new(api_key)?);
    let to = Recipients::one(PhoneNumber::parse(None, phone)?);
    let text = MessageText::new(message)?;

    let response = client.send_sms(to, text, SendSmsOptions::default())?;
    println!("{response:#}");
    Ok(())
}
