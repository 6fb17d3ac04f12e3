use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer.
    ///
    /// Wide intermediate for points/balance products - a `u128 * u128` product
    /// must never be computed in native width.
    pub struct U256(4);
}
