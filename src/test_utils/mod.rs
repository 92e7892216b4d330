#![allow(missing_docs)]

pub(crate) mod http;
pub(crate) mod stores;

pub(crate) use http::{assert_error_body, assert_status, get_test_server, get_test_server_with};
pub(crate) use stores::{MockAccountStore, MockTransactionStore};
