//! Round state machine.
//!
//! Folds the decoded event stream of one game into sealed [`Kyoku`] records.
//! Events are fed strictly in order; one round is in flight at a time.

mod aggregator;
mod context;
mod handlers;

pub use aggregator::RoundLog;
pub use context::{LiabilityTracker, RoundContext};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::game::{Kyoku, RoundEvent, RoundResult};
use crate::score::TsumoLoss;

/// Round currently being built.
#[derive(Debug)]
pub struct InFlight {
    pub kyoku: Kyoku,
    pub ctx: RoundContext,
}

impl InFlight {
    fn check_seat(&self, seat: usize) -> Result<usize> {
        if seat < self.kyoku.players {
            Ok(seat)
        } else {
            Err(Error::SeatOutOfRange {
                seat,
                players: self.kyoku.players,
            })
        }
    }
}

#[derive(Debug, Default)]
pub enum RoundState {
    #[default]
    AwaitingRound,
    InRound(Box<InFlight>),
}

/// Event stream to round records transcoder.
#[derive(Debug)]
pub struct Transcoder {
    tsumo_loss: TsumoLoss,
    state: RoundState,
    log: RoundLog,
    anomalies: u32,
}

impl Transcoder {
    pub fn new(tsumo_loss: TsumoLoss) -> Self {
        Self {
            tsumo_loss,
            state: RoundState::AwaitingRound,
            log: RoundLog::new(),
            anomalies: 0,
        }
    }

    /// Process one event.
    pub fn feed(&mut self, event: &RoundEvent) -> Result<()> {
        match event {
            RoundEvent::NewRound(record) => self.handle_new_round(record),
            RoundEvent::DiscardTile(record) => self.handle_discard_tile(record),
            RoundEvent::DealTile(record) => self.handle_deal_tile(record),
            RoundEvent::ChiPengGang(record) => self.handle_chi_peng_gang(record),
            RoundEvent::AnGangAddGang(record) => self.handle_an_gang_add_gang(record),
            RoundEvent::BaBei(record) => self.handle_ba_bei(record),
            RoundEvent::LiuJu(record) => self.handle_liu_ju(record),
            RoundEvent::NoTile(record) => self.handle_no_tile(record),
            RoundEvent::Hule(record) => self.handle_hule(record),
        }
    }

    /// Process every event of `events` in order, stopping at the first error.
    pub fn feed_all<'a, I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a RoundEvent>,
    {
        events.into_iter().try_for_each(|event| self.feed(event))
    }

    /// Finish the stream and return every round in arrival order.
    pub fn finish(self) -> Vec<Kyoku> {
        self.finish_with_anomalies().0
    }

    /// Like [`finish`](Self::finish), also returning the anomaly count.
    pub fn finish_with_anomalies(mut self) -> (Vec<Kyoku>, u32) {
        self.seal_unfinished();
        (self.log.into_kyokus(), self.anomalies)
    }

    /// The round in flight, if any.
    pub fn current(&self) -> Option<&InFlight> {
        match &self.state {
            RoundState::InRound(flight) => Some(flight.as_ref()),
            RoundState::AwaitingRound => None,
        }
    }

    /// Number of recoverable anomalies skipped so far.
    pub fn anomalies(&self) -> u32 {
        self.anomalies
    }

    fn in_round(&mut self, record: &'static str) -> Result<&mut InFlight> {
        match &mut self.state {
            RoundState::InRound(flight) => Ok(flight.as_mut()),
            RoundState::AwaitingRound => Err(Error::NoRoundInProgress(record)),
        }
    }

    /// Seal the round in flight with `result` and hand it to the log.
    fn seal(&mut self, result: RoundResult) {
        if let RoundState::InRound(flight) = std::mem::take(&mut self.state) {
            let mut kyoku = flight.kyoku;
            let label = format!("{}-{}", kyoku.round.number(), kyoku.round.ben);
            let delta = result.total_delta();
            kyoku.result = Some(result);
            self.log.push(kyoku);
            debug!(
                "Round {} sealed: {:?} ({} in log)",
                label,
                delta,
                self.log.len()
            );
        }
    }

    /// Move a round that never saw a terminal event into the log as-is.
    fn seal_unfinished(&mut self) {
        if let RoundState::InRound(flight) = std::mem::take(&mut self.state) {
            warn!(
                "Round {}-{} ended without a result",
                flight.kyoku.round.number(),
                flight.kyoku.round.ben
            );
            self.anomalies += 1;
            self.log.push(flight.kyoku);
        }
    }
}

impl Default for Transcoder {
    fn default() -> Self {
        Self::new(TsumoLoss::default())
    }
}

/// Transcode a complete event stream.
pub fn transcode<'a, I>(events: I, tsumo_loss: TsumoLoss) -> Result<Vec<Kyoku>>
where
    I: IntoIterator<Item = &'a RoundEvent>,
{
    let mut transcoder = Transcoder::new(tsumo_loss);
    transcoder.feed_all(events)?;
    Ok(transcoder.finish())
}
