use std::{
    sync::{
        mpsc::{self, Sender, TryRecvError},
        Arc, RwLock,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use sleeper::Sleeper;

use crate::State;

pub mod nature;
pub mod sleeper;

/// Drives a [`Ticker`] on its own thread at a fixed interval.
pub struct TickerHost {
    stop_sender: Sender<()>,
    interval_sender: Sender<Duration>,
    thread: JoinHandle<()>,
}

impl TickerHost {
    pub fn start(
        state_arc: Arc<RwLock<State>>,
        interval: Duration,
        mut ticker: Box<dyn Ticker + Send>,
    ) -> Self {
        let (stop_sender, stop_receiver) = mpsc::channel();
        let (interval_sender, interval_receiver) = mpsc::channel();

        let thread = thread::spawn(move || {
            let mut sleeper = Sleeper::new(interval);

            loop {
                sleeper.sleep();

                let Ok(mut state) = state_arc.write() else {
                    log::warn!("State lock poisoned, stopping ticker");
                    break;
                };

                // Checked under the lock, so once a stop request went out while the caller
                // held the state no further tick can happen.
                if !matches!(stop_receiver.try_recv(), Err(TryRecvError::Empty)) {
                    break;
                }

                ticker.tick(&mut state);
                drop(state);

                if let Some(interval) = interval_receiver.try_iter().last() {
                    sleeper.target_delta_time = interval;
                }
            }

            log::debug!("Ticker stopped");
        });

        Self {
            stop_sender,
            interval_sender,
            thread,
        }
    }

    /// Requests the ticker to stop and hands back its thread to join.
    /// Join only after releasing the state lock.
    pub fn stop(self) -> JoinHandle<()> {
        let _ = self.stop_sender.send(());
        self.thread
    }

    pub fn set_interval(&self, interval: Duration) {
        let _ = self.interval_sender.send(interval);
    }
}

pub trait Ticker {
    fn tick(&mut self, state: &mut State);
}
