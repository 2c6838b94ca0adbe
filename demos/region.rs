use std::env;

use emufront::region::{current_region_code, LocalizationHelper, Region};

fn main() {
    enable_logging();

    println!("Locale region code: {:?}", current_region_code());

    let shared = LocalizationHelper::shared();
    let mut helper = match shared.lock() {
        Ok(helper) => helper,
        Err(poisoned) => poisoned.into_inner(),
    };
    println!("Region: {} ({})", helper.region_name(), helper.region().raw());

    // `region eu` stores override, `region clear` removes it
    match env::args().nth(1).as_ref().map(|s| s.as_str()) {
        Some("clear") => {
            helper.clear_region().expect("Unable to clear region override");
        }
        Some(name) => {
            let region: Region = name.parse().expect("Expected one of: na, jpn, eu, other, clear");
            helper.set_region(region).expect("Unable to store region override");
        }
        None => return,
    }
    println!("Region now: {}", helper.region_name());
}

fn enable_logging() {
    let level = if env::var_os("EMUFRONT_DEBUG").is_some() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().compact().with_max_level(level).init();
}
