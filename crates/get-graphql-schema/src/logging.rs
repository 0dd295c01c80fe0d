use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::Args;

pub(crate) fn init(args: &Args) {
    let env_filter = EnvFilter::new(args.log_level.as_filter_str());

    tracing_subscriber::registry()
        .with(args.log_format())
        .with(env_filter)
        .init();
}
