//! Live match state: the clock, the action ledger, and the session state
//! machine that owns both.

pub mod clock;
pub mod ledger;
pub mod match_session;


pub use clock::format_clock;
pub use ledger::ActionLedger;
pub use match_session::MatchSession;
