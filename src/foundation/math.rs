pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// `floor(v / 2)`, also for negative `v`.
pub(crate) fn floor_half(v: i64) -> i64 {
    v.div_euclid(2)
}
