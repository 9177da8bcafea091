use std::{
    io,
    sync::{Arc, mpsc},
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use tokio::runtime::Runtime;
use ygoquiz_engine::{CardSource, DealError, DealerConfig, GameMode, Round, RoundToken, deal};

pub(super) type DealResult = (RoundToken, Result<Round, DealError>);

/// Deals rounds on a background runtime and hands finished deals to the UI thread.
///
/// Each deal gets its own generator seeded from the manager's, so a session
/// started with the same seed replays the same offsets and shuffles.
pub(super) struct DealManager<S> {
    runtime: Runtime,
    source: Arc<S>,
    config: DealerConfig,
    seeds: Pcg32,
    sender: mpsc::Sender<DealResult>,
    receiver: mpsc::Receiver<DealResult>,
}

impl<S> DealManager<S>
where
    S: CardSource + Send + Sync + 'static,
{
    pub(super) fn new(source: S, config: DealerConfig, seed: Option<u64>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("ygoquiz-deal")
            .enable_all()
            .build()?;
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        log::info!("dealing with seed {seed}");
        let (sender, receiver) = mpsc::channel();
        Ok(Self {
            runtime,
            source: Arc::new(source),
            config,
            seeds: Pcg32::seed_from_u64(seed),
            sender,
            receiver,
        })
    }

    /// Starts dealing a round of `mode`; the result is tagged with `token`.
    pub(super) fn start(&mut self, mode: GameMode, token: RoundToken) {
        let mut rng = Pcg32::seed_from_u64(self.seeds.random());
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        let config = self.config;
        log::debug!("{token}: dealing {mode}");
        self.runtime.spawn(async move {
            let dealt = deal(mode, &*source, &mut rng, &config).await;
            // Closed receiver means the app is shutting down.
            let _ = sender.send((token, dealt));
        });
    }

    /// Collects the deals finished since the last call.
    pub(super) fn poll_results(&self) -> Vec<DealResult> {
        self.receiver.try_iter().collect()
    }
}
