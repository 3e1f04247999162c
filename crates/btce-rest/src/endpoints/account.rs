//! Private account endpoints
//!
//! These endpoints require authentication.

use tracing::instrument;

use crate::endpoints::PrivateApi;
use crate::envelope::KeyedPayload;
use crate::error::RestResult;
use crate::types::{
    AccountInfo, ActiveOrder, ActiveOrdersQuery, HistoryQuery, TradeHistoryQuery, TradeRecord,
    Transaction,
};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    api: PrivateApi<'a>,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(api: PrivateApi<'a>) -> Self {
        Self { api }
    }

    /// Get balances, key rights, transaction and open order counts
    #[instrument(skip(self))]
    pub async fn get_info(&self) -> RestResult<AccountInfo> {
        self.api.call("getInfo", ()).await
    }

    /// Get the transaction history (deposits, withdrawals, trades)
    ///
    /// Records are returned in ascending id order regardless of the `order`
    /// option, which only affects which records the server selects.
    #[instrument(skip(self))]
    pub async fn trans_history(&self, options: Option<&HistoryQuery>) -> RestResult<Vec<Transaction>> {
        let payload: KeyedPayload<Transaction> = self.api.call("TransHistory", options).await?;
        Ok(payload.into_vec())
    }

    /// Get the trade history
    ///
    /// Records are returned in ascending trade id order.
    #[instrument(skip(self))]
    pub async fn trade_history(
        &self,
        options: Option<&TradeHistoryQuery>,
    ) -> RestResult<Vec<TradeRecord>> {
        let payload: KeyedPayload<TradeRecord> = self.api.call("TradeHistory", options).await?;
        Ok(payload.into_vec())
    }

    /// Get open orders
    ///
    /// Orders are returned in ascending order id.
    #[instrument(skip(self))]
    pub async fn active_orders(
        &self,
        options: Option<&ActiveOrdersQuery>,
    ) -> RestResult<Vec<ActiveOrder>> {
        let payload: KeyedPayload<ActiveOrder> = self.api.call("ActiveOrders", options).await?;
        Ok(payload.into_vec())
    }
}
