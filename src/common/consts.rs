//! Static constants.

use crate::defs::RoundingMode;
use crate::num::BigFloatNumber;
use lazy_static::lazy_static;

lazy_static! {
    pub(crate) static ref ONE: BigFloatNumber =
        BigFloatNumber::from_i64(1, 1, RoundingMode::ToZero).unwrap().0;
}
