use anyhow::Result;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use tow_fleet_backend::config::environment::EnvironmentConfig;
use tow_fleet_backend::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Error de configuración: {}", e))?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚚 Tow Fleet Backend - Simulación de flota de grúas");
    info!("==================================================");
    info!("⚙️  Entorno: {}", config.environment);

    let server_url = config.server_url();

    // Registro en memoria con la flota de referencia
    let app_state = AppState::seeded(config);
    info!(
        "📋 Registro inicializado con {} vehículos",
        app_state.registry.lock().await.len()
    );

    let app = create_app(app_state);

    let listener = tokio::net::TcpListener::bind(server_url.as_str()).await?;
    info!("🌐 Servidor iniciando en http://{}", listener.local_addr()?);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Endpoints - Vehicles:");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   POST /api/vehicles/simulate - Simular movimiento y estados");
    info!("   POST /api/vehicles/update - Actualizar estado por proveedor");
    info!("   GET  /api/vehicles/stats - Resumen de la flota por estado");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
