use cinema_tickets::utils::logger;
use cinema_tickets::{
    CliConfig, SeatBookingService, TicketError, TicketPaymentGateway, TicketService,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting cinema-tickets CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = config.resolve().and_then(|(request, dry_run)| {
        if dry_run {
            tracing::info!("🔍 DRY RUN MODE - no payment or reservation will be made");
        }
        let service = TicketService::new_with_dry_run(
            TicketPaymentGateway::new(),
            SeatBookingService::new(),
            dry_run,
        );
        service.purchase(&request)
    });

    match result {
        Ok(Some(outcome)) => {
            match outcome.to_json_pretty() {
                Ok(json) => println!("{}", json),
                Err(e) => fail(&e),
            }
        }
        Ok(None) => {
            tracing::info!("✅ Tickets purchased successfully!");
            println!("✅ Tickets purchased successfully!");
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &TicketError) {
    if e.is_rejection() {
        tracing::warn!("❌ Purchase rejected: {} (Category: {:?})", e, e.category());
    } else {
        tracing::error!(
            "❌ Purchase failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
    }

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = e.exit_code();
    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
