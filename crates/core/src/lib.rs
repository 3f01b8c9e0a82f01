//! Domain logic for the BuyBitcoin voice skill.
//!
//! Nothing in this crate knows about HTTP servers or the voice platform's
//! envelope format. It answers three questions: what does one unit of an
//! asset cost right now (`price`), what is an amount worth or how much of
//! an asset can an amount buy (`conversion`), and what should the skill say
//! to sound a little less robotic (`phrases`).

pub mod conversion;
pub mod phrases;
pub mod price;
