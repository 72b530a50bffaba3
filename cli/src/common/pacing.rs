//! # Pacing (`common::pacing`)
//!
//! File: cli/src/common/pacing.rs
//!
//! The terminal's implementation of the `Delay` port. `Pacer::Real` sleeps on
//! the tokio timer; `Pacer::Instant` returns immediately and backs the global
//! `--no-delay` flag (`SMARTSDLC_NO_DELAY`), which integration tests rely on.
//!
use crate::assistant::session::Delay;
use std::time::Duration;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacer {
    Real,
    Instant,
}

impl Pacer {
    pub fn from_no_delay(no_delay: bool) -> Self {
        if no_delay {
            Pacer::Instant
        } else {
            Pacer::Real
        }
    }
}

impl Delay for Pacer {
    async fn wait(&self, duration: Duration) {
        match self {
            Pacer::Real if !duration.is_zero() => {
                trace!("Pausing for {:?}", duration);
                tokio::time::sleep(duration).await;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn instant_pacer_does_not_sleep() {
        let started = Instant::now();
        Pacer::Instant.wait(Duration::from_secs(30)).await;
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn real_pacer_waits() {
        let started = Instant::now();
        Pacer::Real.wait(Duration::from_millis(20)).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn flag_selects_pacer() {
        assert_eq!(Pacer::from_no_delay(true), Pacer::Instant);
        assert_eq!(Pacer::from_no_delay(false), Pacer::Real);
    }
}
