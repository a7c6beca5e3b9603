//! Black-box HTTP tests for faultline; see `tests/`
