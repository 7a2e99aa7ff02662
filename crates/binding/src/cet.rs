//! Chainfly Energy Token (CET) contract bindings.
//!
//! CET is an ERC20 with `Ownable` access control. On top of the standard
//! token surface it exposes owner-gated `mint`, `giveCashback` and
//! `burnFrom`, and a public `burn` for holders.

use alloy_sol_types::sol;

sol! {
    /// CET token contract
    #[sol(rpc)]
    interface ICETToken {
        /// Emitted when tokens are transferred (including mint and burn legs)
        event Transfer(
            address indexed from,
            address indexed to,
            uint256 value
        );

        /// Emitted when an allowance is set
        event Approval(
            address indexed owner,
            address indexed spender,
            uint256 value
        );

        /// Emitted when ownership moves to a new account
        event OwnershipTransferred(
            address indexed previousOwner,
            address indexed newOwner
        );

        /// Emitted by the owner-only `mint`
        event Minted(address indexed to, uint256 amount);

        /// Emitted by `burn` and `burnFrom`
        event Burned(address indexed from, uint256 amount);

        /// Emitted by the owner-only `giveCashback`
        event Cashback(address indexed user, uint256 amount);

        error OwnableUnauthorizedAccount(address account);
        error OwnableInvalidOwner(address owner);
        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
        error ERC20InsufficientAllowance(address spender, uint256 allowance, uint256 needed);
        error ERC20InvalidSender(address sender);
        error ERC20InvalidReceiver(address receiver);
        error ERC20InvalidApprover(address approver);
        error ERC20InvalidSpender(address spender);

        /// Supply minted to the initial owner at deployment
        function INITIAL_SUPPLY() external view returns (uint256);

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function owner() external view returns (address);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);

        function transfer(address to, uint256 value) external returns (bool);
        function transferFrom(address from, address to, uint256 value) external returns (bool);
        function approve(address spender, uint256 value) external returns (bool);

        /// Burn `amount` from the caller's balance
        function burn(uint256 amount) external;

        /// Burn `amount` from `account`, spending the caller's allowance (owner only)
        function burnFrom(address account, uint256 amount) external;

        /// Mint new tokens to `to` (owner only)
        function mint(address to, uint256 amount) external;

        /// Mint a cashback reward to `user` (owner only)
        function giveCashback(address user, uint256 amount) external;

        function transferOwnership(address newOwner) external;
        function renounceOwnership() external;
    }
}
