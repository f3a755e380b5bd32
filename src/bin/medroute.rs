

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use medroute::assistant::{gazetteer, render_consultation, render_hospitals};
use medroute::{Coordinates, MedrouteConfig, RecommendationOrchestrator, RecommendationQuery};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "medroute")]
#[command(about = "Recommend a specialist and nearby hospitals for described symptoms")]
struct Args {
    /// Free-text symptom description
    symptoms: Vec<String>,

    /// Hospital specialty to search instead of the matched specialist's
    #[arg(long)]
    specialty: Option<String>,

    /// City name used to locate the user
    #[arg(long)]
    city: Option<String>,

    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Only keep hospitals accepting this insurance provider
    #[arg(long)]
    insurance: Option<String>,

    #[arg(long)]
    emergency: bool,

    /// Search radius in kilometers
    #[arg(long)]
    max_distance: Option<f64>,

    /// Skip symptom matching and list hospitals only
    #[arg(long)]
    hospitals_only: bool,

    #[arg(long, env = "MEDROUTE_CONFIG")]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("medroute=warn".parse()?))
        .init();

    let args = Args::parse();
    let text = args.symptoms.join(" ");

    let config = MedrouteConfig::load(args.config.as_deref()).context("loading configuration")?;
    let orchestrator = RecommendationOrchestrator::from_config(config)?;

    let location = resolve_location(&args, &text)?;
    debug!("User location: {:?}", location);

    if args.hospitals_only {
        let hospitals = orchestrator.find_hospitals(
            args.specialty.as_deref(),
            location.as_ref(),
            args.insurance.as_deref(),
            args.emergency,
            args.max_distance,
        )?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&hospitals)?);
        } else {
            println!("{}", render_hospitals(&hospitals));
        }
        return Ok(());
    }

    if text.trim().is_empty() && args.specialty.is_none() {
        bail!("describe your symptoms or pass --specialty");
    }

    let mut query = RecommendationQuery::new(text).emergency(args.emergency);
    if let Some(location) = location {
        query = query.with_location(location);
    }
    if let Some(specialty) = args.specialty {
        query = query.with_specialty(specialty);
    }
    if let Some(insurance) = args.insurance {
        query = query.with_insurance(insurance);
    }
    query = query.within_km(args.max_distance.unwrap_or(if args.emergency {
        orchestrator.config().emergency_radius_km
    } else {
        orchestrator.config().specialty_radius_km
    }));

    let recommendation = orchestrator.consult(&query).await?;
    info!(
        "Recommended {} with {} hospitals",
        recommendation.specialist.category,
        recommendation.hospitals.len()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        println!("{}", render_consultation(&recommendation));
    }

    Ok(())
}

fn resolve_location(args: &Args, text: &str) -> anyhow::Result<Option<Coordinates>> {
    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        return Ok(Some(Coordinates::new(lat, lon)?));
    }

    Ok(gazetteer::locate(args.city.as_deref(), text))
}
