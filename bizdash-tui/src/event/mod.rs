//！┌─────────────────────────────────────────────────────────────────────┐
//！│                          主循环 (app.rs)                            │
//！│                                                                     │
//！│   ┌─────────┐          ┌───────────┐          ┌──────────┐          │
//！│   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │          │
//！│   │   层    │   翻译    │    层     │   消费    │    层    │          │
//！│   └─────────┘          │ AppMessage│          └────┬─────┘          │
//！│        ▲               │ NavMsg    │               │ 修改           │
//！│        │               │ ContentMsg│               ▼                │
//！│   ┌─────────┐          └───────────┘          ┌──────────┐          │
//！│   │  View   │ ◀──────────── 读取 ──────────── │  Model   │          │
//！│   │   层    │                                 │    层    │          │
//！│   └─────────┘                                 └────┬─────┘          │
//！│                                                    │ 路由 / 主题     │
//！│                                                    ▼                │
//！│                                           ┌────────────────┐        │
//！│                                           │  bizdash-core  │        │
//！│                                           └────────────────┘        │
//！└─────────────────────────────────────────────────────────────────────┘

//!
//! src/event/mod.rs
//! Event 层：轮询终端事件并翻译为 AppMessage

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
