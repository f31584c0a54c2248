//! Random sources for exercising failure and bookkeeping paths in tests.

use std::io;

use rand::{CryptoRng, RngCore, TryCryptoRng, TryRngCore};

fn exhausted() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "entropy source exhausted")
}

/// A source whose every draw fails.
#[derive(Debug, Default)]
pub struct FailingRng;

impl TryRngCore for FailingRng {
    type Error = io::Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Err(exhausted())
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Err(exhausted())
    }

    fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> Result<(), Self::Error> {
        Err(exhausted())
    }
}

impl TryCryptoRng for FailingRng {}

/// Delegates to an inner source for `budget` draws, then fails.
#[derive(Debug)]
pub struct FlakyRng<R> {
    inner: R,
    budget: usize,
}

impl<R> FlakyRng<R> {
    pub fn new(inner: R, budget: usize) -> Self {
        Self { inner, budget }
    }

    fn spend(&mut self) -> Result<(), io::Error> {
        if self.budget == 0 {
            return Err(exhausted());
        }
        self.budget -= 1;
        Ok(())
    }
}

impl<R: RngCore> TryRngCore for FlakyRng<R> {
    type Error = io::Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        self.spend()?;
        Ok(self.inner.next_u32())
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        self.spend()?;
        Ok(self.inner.next_u64())
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.spend()?;
        self.inner.fill_bytes(dst);
        Ok(())
    }
}

impl<R: CryptoRng> TryCryptoRng for FlakyRng<R> {}

/// Counts how many draws pass through to the inner source.
#[derive(Debug)]
pub struct CountingRng<R> {
    inner: R,
    draws: usize,
}

impl<R> CountingRng<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, draws: 0 }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dst);
    }
}

impl<R: CryptoRng> CryptoRng for CountingRng<R> {}
