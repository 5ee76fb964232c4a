//! Records, iteration and string validation walkthrough.

use listkit_core::{EmailExt, User};
use log::info;
use std::io::{self, Write};

fn main() -> io::Result<()> {
    listkit_cli::init_demo_logging("good_practices");
    info!("op=demo_start area=good_practices outcome=ok");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let users = vec![User::new(1, "Alice"), User::new(2, "Bob")];
    for user in &users {
        writeln!(out, "User: {}", user.name)?;
    }

    let email = "test@example.com";
    writeln!(out, "Is email valid? {}", email.is_email_valid())?;

    info!(
        "op=demo_finish area=good_practices outcome=ok users={}",
        users.len()
    );
    Ok(())
}
