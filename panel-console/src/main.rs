//! Interactive admin panel for the employee productivity backend
//!
//! Run: cargo run -p panel-console

mod config;
mod logger;
mod view;

use std::fs;

use panel_client::{ClientConfig, ClientError, PanelClient};
use shared::client::ExportFormat;
use shared::models::{EmployeeCreate, EmployeeRecord, EmployeeUpdate};

use config::Config;
use view::{confirm, get_input, get_input_with_default, prompt_optional_f64, render_table};

/// Outcome of a view loop
enum Flow {
    /// Session ended (logout or 401), return to the login view
    SessionEnded,
    /// User asked to exit the program
    Quit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    logger::init_logger(&config.log_level, config.log_json)?;

    print_banner();
    tracing::info!(api_url = %config.api_url, "Admin panel starting");

    // 2. Build the client
    let mut client = ClientConfig::new(&config.api_url)
        .with_timeout(config.request_timeout_secs)
        .with_session_path(config.session_path())
        .build_client();

    // 3. Backend reachability probe
    match client.health().await {
        Ok(()) => println!("✅ Backend reachable at {}", config.api_url),
        Err(e) => println!("⚠️  Backend not reachable: {}", e.user_message()),
    }

    // 4. Auto-resume a persisted session; the first list call verifies it
    if client.resume() {
        println!("🔑 Resuming stored session...");
    }

    loop {
        if !client.is_authenticated() && !login_view(&mut client).await {
            break;
        }

        match panel_view(&mut client, &config).await? {
            Flow::SessionEnded => continue,
            Flow::Quit => break,
        }
    }

    println!("\n👋 Goodbye!");
    Ok(())
}

fn print_banner() {
    println!("\n📋 Employee Productivity Admin Panel");
    println!("=====================================\n");
}

/// Login view: prompt for credentials until a session is established.
///
/// Returns `false` if the user chose to quit instead.
async fn login_view(client: &mut PanelClient) -> bool {
    loop {
        println!("\n🔑 Login (blank username to quit)");
        let username = get_input("Username: ");
        if username.is_empty() {
            return false;
        }
        let password = get_input("Password: ");

        match client.login(&username, &password).await {
            Ok(_) => {
                println!("✅ Login successful");
                return true;
            }
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "Login failed");
                println!("❌ {}", e.user_message());
            }
        }
    }
}

/// Data view: render the table and dispatch menu actions until the session
/// ends or the user quits.
async fn panel_view(client: &mut PanelClient, config: &Config) -> anyhow::Result<Flow> {
    // One request in flight at a time: every action is awaited before the
    // table is redrawn, so a stale response can never overwrite newer state.
    let mut employees = match client.list_employees().await {
        Ok(list) => list,
        Err(e) => {
            println!("❌ {}", e.user_message());
            if e.is_auth_failure() {
                return Ok(Flow::SessionEnded);
            }
            Vec::new()
        }
    };

    loop {
        println!("\n{}", render_table(&employees));
        print_menu();

        let choice = get_input("Enter choice (0-7): ");
        let refresh = match choice.as_str() {
            "0" => return Ok(Flow::Quit),
            "1" => true,
            "2" => run_action(add_employee(client)).await,
            "3" => run_action(update_employee(client, &employees)).await,
            "4" => run_action(delete_employee(client)).await,
            "5" => run_action(export_report(client, config, ExportFormat::Csv)).await,
            "6" => run_action(export_report(client, config, ExportFormat::Pdf)).await,
            "7" => {
                client.logout().await;
                println!("✅ Logged out");
                return Ok(Flow::SessionEnded);
            }
            _ => {
                println!("❌ Invalid choice");
                false
            }
        };

        if refresh {
            match client.list_employees().await {
                Ok(list) => employees = list,
                Err(e) => {
                    println!("❌ {}", e.user_message());
                    if e.is_auth_failure() {
                        return Ok(Flow::SessionEnded);
                    }
                    // Keep the previously rendered state on other failures
                }
            }
        } else if !client.is_authenticated() {
            // The action hit a 401 and the client dropped the session
            return Ok(Flow::SessionEnded);
        }
    }
}

fn print_menu() {
    println!("Available Actions:");
    println!("1. Refresh list");
    println!("2. Add employee");
    println!("3. Update employee");
    println!("4. Delete employee");
    println!("5. Export report (CSV)");
    println!("6. Export report (PDF)");
    println!("7. Logout");
    println!("0. Exit");
}

/// Run an action, report its message, and say whether the list should be
/// refreshed. Failures leave the rendered state intact.
async fn run_action(
    action: impl std::future::Future<Output = Result<Option<String>, ClientError>>,
) -> bool {
    match action.await {
        Ok(message) => {
            if let Some(message) = message {
                println!("✅ {}", message);
            }
            true
        }
        Err(e) => {
            println!("❌ {}", e.user_message());
            false
        }
    }
}

async fn add_employee(client: &mut PanelClient) -> Result<Option<String>, ClientError> {
    println!("\n➕ Add employee");
    let name = get_input("Name: ");
    let role = get_input("Role: ");
    let productivity = prompt_optional_f64("Productivity 0-100 (blank for 0): ").unwrap_or(0.0);
    let feedback = get_input("Feedback (optional): ");
    let rating = prompt_optional_f64("Rating 0-5 (optional): ");

    let payload = EmployeeCreate {
        name,
        role,
        productivity,
        feedback: (!feedback.is_empty()).then_some(feedback),
        rating,
    };
    let status = client.add_employee(&payload).await?;
    Ok(Some(status.message))
}

async fn update_employee(
    client: &mut PanelClient,
    employees: &[EmployeeRecord],
) -> Result<Option<String>, ClientError> {
    println!("\n✏️  Update employee");
    let Some(id) = prompt_optional_f64("Employee ID: ").map(|v| v as i64) else {
        return Ok(None);
    };

    // Prefill from the currently rendered record where we have it
    let current = employees.iter().find(|e| e.id == id);
    let name = get_input_with_default("Name", current.map(|e| e.name.as_str()).unwrap_or(""));
    let role = get_input_with_default("Role", current.map(|e| e.role.as_str()).unwrap_or(""));
    let feedback = get_input_with_default(
        "Feedback",
        current.and_then(|e| e.feedback.as_deref()).unwrap_or(""),
    );
    let rating = prompt_optional_f64("Rating 0-5 (blank to clear): ");

    let payload = EmployeeUpdate {
        name,
        role,
        feedback: (!feedback.is_empty()).then_some(feedback),
        rating,
    };
    let status = client.update_employee(id, &payload).await?;
    Ok(Some(status.message))
}

async fn delete_employee(client: &mut PanelClient) -> Result<Option<String>, ClientError> {
    println!("\n🗑  Delete employee");
    let Some(id) = prompt_optional_f64("Employee ID: ").map(|v| v as i64) else {
        return Ok(None);
    };
    if !confirm(&format!("Are you sure you want to delete employee {}?", id)) {
        return Ok(None);
    }
    let status = client.delete_employee(id).await?;
    Ok(Some(status.message))
}

async fn export_report(
    client: &mut PanelClient,
    config: &Config,
    format: ExportFormat,
) -> Result<Option<String>, ClientError> {
    let bytes = client.export_report(format).await?;

    let reports_dir = config.reports_dir();
    fs::create_dir_all(&reports_dir)?;
    let file_name = format!(
        "report-{}.{}",
        chrono::Local::now().format("%Y%m%d-%H%M%S"),
        format.extension()
    );
    let path = reports_dir.join(file_name);
    fs::write(&path, &bytes)?;

    tracing::info!(path = %path.display(), size = bytes.len(), "Report exported");
    Ok(Some(format!("Report saved to {}", path.display())))
}
