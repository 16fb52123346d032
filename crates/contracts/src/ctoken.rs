//! Compound cToken interface definitions.
//!
//! `mint` and `redeem` report business failures through a non-zero return
//! code instead of reverting, so callers must check it.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface ICToken {
        // Transaction functions
        function mint(uint256 mintAmount) external returns (uint256);
        function redeem(uint256 redeemTokens) external returns (uint256);

        // Market state
        function totalBorrows() external view returns (uint256);
        function getCash() external view returns (uint256);
        function totalReserves() external view returns (uint256);
        function reserveFactorMantissa() external view returns (uint256);
        function supplyRatePerBlock() external view returns (uint256);
        function exchangeRateStored() external view returns (uint256);

        // Wiring
        function interestRateModel() external view returns (address);
        function underlying() external view returns (address);
    }
}
