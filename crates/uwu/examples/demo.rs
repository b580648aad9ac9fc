use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

static SAMPLES: [&str; 4] = [
    // not enough data
    "UwUUwUOwO",
    "UwUUwUOwOUwUUwUOwOOwOUwU",
    // bad characters
    "ASOKRAOKERKOERKOEOEOOEOO",
    // bad eyes, separators are fine
    "UwUOwOUwUOwOUwUOwOAwAOwO",
];

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut data = b"Hewwo! :3".to_vec();
    data.push(0);

    let encoded = match base_uwu::encode(&data) {
        Ok(encoded) => encoded,
        Err(e) => {
            error!(cause = %e, "encode error");
            return;
        }
    };
    info!(encoded = %encoded, "encoded");

    let decoded = match base_uwu::decode(&encoded) {
        Ok(decoded) => decoded,
        Err(e) => {
            error!(cause = %e, "decode error");
            return;
        }
    };
    info!(length = decoded.len(), decoded = %String::from_utf8_lossy(&decoded), "decoded");

    for sample in SAMPLES {
        match base_uwu::check(sample) {
            Ok(()) => info!(sample, valid = true, "validated"),
            Err(violation) => info!(sample, valid = false, %violation, "validated"),
        }
    }
}
