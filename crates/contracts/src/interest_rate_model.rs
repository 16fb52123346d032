//! White paper (linear) interest rate model interface definitions.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IInterestRateModel {
        function baseRatePerBlock() external view returns (uint256);
        function multiplierPerBlock() external view returns (uint256);
        function blocksPerYear() external view returns (uint256);
        function getSupplyRate(
            uint256 cash,
            uint256 borrows,
            uint256 reserves,
            uint256 reserveFactorMantissa
        ) external view returns (uint256);
    }
}
