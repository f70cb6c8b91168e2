//! Order book walks used by [`MarketClient`](super::MarketClient).
//!
//! These are pure functions over decoded books so they can be exercised
//! without a network round trip.

use crate::error::YobitError;
use crate::rest::public::{OrderBook, OrderBookLevel};
use crate::types::BookSide;

/// Highest level index a price walk may land on.
///
/// The exchange returns 150 levels per side by default.
pub const MAX_BOOK_INDEX: usize = 149;

/// Result of walking the ask side for a price-by-amount query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceWalk {
    /// Level index the price is read from, after backoff and clamping.
    pub index: usize,
    /// Notional volume accumulated when the walk ended, after backoff.
    pub accumulated: f64,
}

/// Quote-currency volume between the top of the book and `value`.
///
/// If `value` is above the best ask, asks are summed while `value >= price`;
/// otherwise bids are summed while `value <= price`. Summation stops at the
/// first level that fails the test.
pub fn depth_to(book: &OrderBook, value: f64) -> Result<(BookSide, f64), YobitError> {
    let best_ask = book
        .best_ask()
        .ok_or_else(|| YobitError::absent("best ask in empty order book"))?;

    if value > best_ask.price {
        let depth = sum_while(&book.asks, |level| value >= level.price);
        Ok((BookSide::Asks, depth))
    } else {
        let depth = sum_while(&book.bids, |level| value <= level.price);
        Ok((BookSide::Bids, depth))
    }
}

fn sum_while(levels: &[OrderBookLevel], include: impl Fn(&OrderBookLevel) -> bool) -> f64 {
    levels
        .iter()
        .take_while(|level| include(*level))
        .map(OrderBookLevel::notional)
        .sum()
}

/// Walk the asks for a buy of `value` quote currency.
///
/// Accumulates notional volume level by level until the accumulated amount
/// reaches `value`, then backs off: the level that would have been consumed
/// next is subtracted and the index steps back by two.
pub fn buy_walk(asks: &[OrderBookLevel], value: f64) -> PriceWalk {
    walk_asks(asks, |accumulated| accumulated >= value)
}

/// Walk for a sell receiving `value` quote currency.
///
/// This walks the *asks* and stops as soon as the accumulated amount is at or
/// below `value`, which for a non-negative `value` is the first level. The
/// resulting index is read from the bids, not the asks it was computed on.
pub fn sell_walk(asks: &[OrderBookLevel], value: f64) -> PriceWalk {
    walk_asks(asks, |accumulated| accumulated <= value)
}

fn walk_asks(asks: &[OrderBookLevel], stop: impl Fn(f64) -> bool) -> PriceWalk {
    let mut accumulated = 0.0;
    let mut index: isize = 0;

    for level in asks {
        if stop(accumulated) {
            accumulated -= level.notional();
            index -= 2;
            break;
        }
        accumulated += level.notional();
        index += 1;
    }

    // A backoff past the top of the book lands on the best level.
    let index = usize::try_from(index).unwrap_or(0).min(MAX_BOOK_INDEX);
    tracing::debug!(index, accumulated, "order book walk finished");

    PriceWalk { index, accumulated }
}

/// Price at `index` on the given side, or an error past the end of the book.
pub fn price_at(book: &OrderBook, side: BookSide, index: usize) -> Result<f64, YobitError> {
    let levels = match side {
        BookSide::Asks => &book.asks,
        BookSide::Bids => &book.bids,
    };
    levels
        .get(index)
        .map(|level| level.price)
        .ok_or(YobitError::BookIndexOutOfRange {
            side,
            index,
            len: levels.len(),
        })
}
