
use crate::CommandContext;

use th_config::Config;
use th_db::open_in_memory_pool;
use th_notify::{NotificationQueue, NotificationReceiver};

/// Command context over an in-memory database with default configuration
pub(crate) async fn test_context() -> (CommandContext, NotificationReceiver) {
    let pool = open_in_memory_pool().await.unwrap();
    let (queue, receiver) = NotificationQueue::bounded(8);
    let ctx = CommandContext::from_config(&Config::default(), pool, queue);
    (ctx, receiver)
}
