//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use btce_auth::Params;
use tracing::{debug, instrument};

use crate::endpoints::PrivateApi;
use crate::error::RestResult;
use crate::types::{CancelledOrder, OrderId, PlacedOrder, ToParams, TradeRequest};

/// Parameters for `CancelOrder`
struct CancelOrder {
    order_id: OrderId,
}

impl ToParams for CancelOrder {
    fn write_params(&self, params: &mut Params) {
        params.insert("order_id", self.order_id);
    }
}

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    api: PrivateApi<'a>,
}

impl<'a> TradingEndpoints<'a> {
    pub(crate) fn new(api: PrivateApi<'a>) -> Self {
        Self { api }
    }

    /// Place a limit order
    ///
    /// # Returns
    /// Filled and remaining amounts, the resting order id (0 if fully
    /// filled), and balances after the trade
    #[instrument(skip(self, order), fields(pair = %order.pair, side = %order.trade_type, rate = %order.rate))]
    pub async fn trade(&self, order: &TradeRequest) -> RestResult<PlacedOrder> {
        let placed: PlacedOrder = self.api.call("Trade", order).await?;
        debug!(
            order_id = placed.order_id,
            received = %placed.received,
            remains = %placed.remains,
            "Order placed"
        );
        Ok(placed)
    }

    /// Cancel an open order
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: OrderId) -> RestResult<CancelledOrder> {
        self.api.call("CancelOrder", CancelOrder { order_id }).await
    }
}
