use chrono::Utc;
use zoneshift::{EasternReading, Instant, UtcReading};

fn main() {
    let now = Instant::from_utc(Utc::now());
    let utc = UtcReading::from_instant(now).expect("now is representable");
    let eastern = EasternReading::from_instant(now).expect("now is representable");

    println!("UTC: {utc}");
    println!("Eastern: {eastern}");
    println!(
        "offset: {} s ({})",
        eastern.offset_seconds(),
        eastern.offset_abbreviation()
    );
}
