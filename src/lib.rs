pub mod error;
pub mod config;
pub mod time;
pub mod request;
pub mod response;
pub mod usage;
pub mod operations;
pub mod client;
pub mod output;

/*

randapi: true random values from random.org over JSON-RPC.

one request per invocation:

  Operation params
    -> new_request        (fresh uuid, params serialized once)
    -> RandClient         (POST with deadline, 200 only)
    -> RandResponse::parse (error > missing result > version)
    -> id correlation
    -> OutputProcessor

randapi/
├── src/
│   ├── lib.rs          # Re-exports
│   ├── main.rs         # CLI wiring
│   ├── error.rs        # Error + ErrorKind
│   ├── config.rs       # AppConfig, key and pregen resolution
│   ├── time.rs         # RandTime wire timestamp
│   ├── request.rs      # RandomRequest, new_request, PregenRand
│   ├── response.rs     # Envelope parsing, result types
│   ├── usage.rs        # getUsage types
│   ├── client.rs       # RandClient executor
│   ├── operations/     # One descriptor per generate* method
│   └── output.rs       # Value stream and usage block
└── tests/

*/

pub use client::{Generated, RandClient};
pub use config::AppConfig;
pub use error::{Error, ErrorKind};
pub use operations::Operation;
pub use output::OutputProcessor;
pub use request::{new_request, PregenRand, RandomRequest, JSON_RPC_VERSION};
pub use response::{
  ApiInfo, ErrorResponse, RandResponse, RandResponseResult, RandomData, Reply
};
pub use time::{RandTime, TimeError};
pub use usage::UsageStatus;
