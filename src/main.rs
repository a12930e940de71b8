use iiopoll::prelude::*;
use log::debug;
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let config = ChannelConfig::default();
    debug!(
        "Polling {} every {}ms",
        config.path.display(),
        config.interval_ms
    );

    let channel = AdcChannel::new(SysfsSource::new(&config.path), config.scale());
    let monitor = Monitor::new(channel, config.interval());

    // The token is never cancelled here: the loop runs until the process is
    // externally terminated.
    monitor.run(CancellationToken::new(), Console).await;
}
