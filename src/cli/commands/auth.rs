//! Registration, login, and session command handlers

use acadtrack::config::Config;
use acadtrack::core::models::{LoginInput, RegisterInput};
use acadtrack::core::storage::{CourseStore, Session, Store, UserStore};
use acadtrack::{error, info};

use super::{current_user, open_store};

/// Run the register command.
pub fn run_register(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: Option<&str>,
    config: &Config,
) {
    if let Err(err) = register(name, email, password, confirm_password, config) {
        error!("Registration failed for {email}: {err}");
        eprintln!("{err}");
    }
}

fn register(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: Option<&str>,
    config: &Config,
) -> Result<(), String> {
    let store = open_store(config)?;
    let input = RegisterInput {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.unwrap_or(password).to_string(),
    };

    let user = UserStore::new(&store)
        .register(&input)
        .map_err(|e| format!("✗ Registration failed: {e}"))?;

    Session::begin(&store, &user).map_err(|e| format!("✗ Failed to start session: {e}"))?;

    info!("User registered: {}", user.email);
    println!("✓ Registered {} <{}>", user.name, user.email);
    println!("✓ Logged in");

    Ok(())
}

/// Run the login command.
pub fn run_login(email: &str, password: &str, config: &Config) {
    if let Err(err) = login(email, password, config) {
        error!("Login failed for {email}: {err}");
        eprintln!("{err}");
    }
}

fn login(email: &str, password: &str, config: &Config) -> Result<(), String> {
    let store = open_store(config)?;
    let input = LoginInput {
        email: email.to_string(),
        password: password.to_string(),
    };

    let user = UserStore::new(&store)
        .authenticate(&input)
        .map_err(|e| format!("✗ Login failed: {e}"))?;

    Session::begin(&store, &user).map_err(|e| format!("✗ Failed to start session: {e}"))?;

    info!("User logged in: {}", user.email);
    println!("✓ Logged in as {} <{}>", user.name, user.email);

    Ok(())
}

/// Run the logout command.
pub fn run_logout(config: &Config) {
    if let Err(err) = logout(config) {
        error!("Logout failed: {err}");
        eprintln!("{err}");
    }
}

fn logout(config: &Config) -> Result<(), String> {
    let store = open_store(config)?;

    if Session::load(&store).is_none() {
        println!("Not logged in.");
        return Ok(());
    }

    Session::end(&store).map_err(|e| format!("✗ Failed to end session: {e}"))?;
    println!("✓ Logged out");

    Ok(())
}

/// Run the unregister command.
pub fn run_unregister(password: &str, config: &Config) {
    if let Err(err) = unregister(password, config) {
        error!("Unregister failed: {err}");
        eprintln!("{err}");
    }
}

fn unregister(password: &str, config: &Config) -> Result<(), String> {
    let store = open_store(config)?;
    let user = current_user(&store)?;

    // Re-verify the password before destroying the account
    let input = LoginInput {
        email: user.email.clone(),
        password: password.to_string(),
    };
    UserStore::new(&store)
        .authenticate(&input)
        .map_err(|e| format!("✗ {e}"))?;

    let removed = CourseStore::new(&store)
        .delete_for_user(user.id)
        .map_err(|e| format!("✗ Failed to remove courses: {e}"))?;

    UserStore::new(&store)
        .delete(user.id)
        .map_err(|e| format!("✗ Failed to delete account: {e}"))?;

    Session::end(&store).map_err(|e| format!("✗ Failed to end session: {e}"))?;

    info!("User unregistered: {}", user.email);
    println!("✓ Account deleted ({removed} courses removed)");

    Ok(())
}

/// Run the whoami command.
pub fn run_whoami(config: &Config) {
    if let Err(err) = whoami(config) {
        eprintln!("{err}");
    }
}

fn whoami(config: &Config) -> Result<(), String> {
    let store: Store = open_store(config)?;
    let user = current_user(&store)?;

    println!("{} <{}>", user.name, user.email);

    Ok(())
}
