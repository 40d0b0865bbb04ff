use anyhow::{Context, Result};
use colored::*;
use serde::Deserialize;
use serde_json::json;
use std::io::{self, Write};

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Vehicle {
    id: String,
    status: String,
    provider_name: String,
    driver_name: String,
    lat: f64,
    lng: f64,
    rating: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🚚 Tow Fleet Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());

    let base_url = std::env::var("FLEET_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    println!("{} {}", "🌐 API:".bright_blue(), base_url);

    let client = reqwest::Client::new();

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🔍 Listar vehículos");
        println!("2. 🎲 Simular movimiento");
        println!("3. ✏️  Actualizar estado por proveedor");
        println!("4. 📊 Resumen de la flota");
        println!("5. 🚪 Salir");
        let choice = prompt("Selecciona una opción (1-5): ")?;

        let result = match choice.as_str() {
            "1" => list_vehicles(&client, &base_url).await,
            "2" => simulate(&client, &base_url).await,
            "3" => update_status(&client, &base_url).await,
            "4" => show_stats(&client, &base_url).await,
            "5" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{} {:#}", "❌ Error:".bright_red().bold(), e);
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn print_vehicles(vehicles: &[Vehicle]) {
    println!(
        "{}",
        format!(
            "{:<8} {:<9} {:<24} {:<10} {:>10} {:>11} {:>6}",
            "ID", "ESTADO", "PROVEEDOR", "CHOFER", "LAT", "LNG", "RATING"
        )
        .bold()
    );
    for v in vehicles {
        let status = match v.status.as_str() {
            "Active" => v.status.green(),
            "Busy" => v.status.yellow(),
            "Offline" => v.status.dimmed(),
            _ => v.status.red(),
        };
        println!(
            "{:<8} {:<9} {:<24} {:<10} {:>10.4} {:>11.4} {:>6.1}",
            v.id, status, v.provider_name, v.driver_name, v.lat, v.lng, v.rating
        );
    }
}

async fn list_vehicles(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let vehicles: Vec<Vehicle> = client
        .get(format!("{}/api/vehicles", base_url))
        .send()
        .await
        .context("No se pudo conectar con la API")?
        .error_for_status()?
        .json()
        .await?;

    println!();
    println!("{}", format!("🚗 {} vehículos", vehicles.len()).bright_green().bold());
    print_vehicles(&vehicles);
    Ok(())
}

async fn simulate(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let vehicles: Vec<Vehicle> = client
        .post(format!("{}/api/vehicles/simulate", base_url))
        .send()
        .await
        .context("No se pudo conectar con la API")?
        .error_for_status()?
        .json()
        .await?;

    println!();
    println!("{}", "✅ Simulación aplicada".bright_green().bold());
    print_vehicles(&vehicles);
    Ok(())
}

async fn update_status(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let provider_name = prompt("Proveedor (ej: QuickFix Towing): ")?;
    let status = prompt("Nuevo estado (Active/Busy/Offline): ")?;

    let payload = json!({
        "providerName": provider_name,
        "status": status,
    });

    println!("{}", "📦 Payload:".bright_blue());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    let response = client
        .post(format!("{}/api/vehicles/update", base_url))
        .json(&payload)
        .send()
        .await
        .context("No se pudo conectar con la API")?;

    let status_code = response.status();
    let body: serde_json::Value = response.json().await?;

    if status_code.is_success() {
        println!("{}", "✅ Vehículo actualizado:".bright_green().bold());
    } else {
        println!("{}", format!("⚠️ Respuesta {}:", status_code).bright_yellow().bold());
    }
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

async fn show_stats(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let stats: serde_json::Value = client
        .get(format!("{}/api/vehicles/stats", base_url))
        .send()
        .await
        .context("No se pudo conectar con la API")?
        .error_for_status()?
        .json()
        .await?;

    println!("{}", "📊 RESUMEN DE LA FLOTA:".bright_green().bold());
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
