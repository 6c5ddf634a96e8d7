pub mod env {
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    pub const QUEUE_URL: &str = "QUEUE_URL";
    pub const MESSAGE_GROUP_ID: &str = "MESSAGE_GROUP_ID";
    pub const REGION: &str = "REGION";
    pub const ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";
    pub const RECEIVE_WAIT_TIME_SECONDS: &str = "RECEIVE_WAIT_TIME_SECONDS";
}

pub mod server {
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 3000;
}

pub mod sqs {
    /// Long polling is capped at 20 seconds by SQS.
    pub const MAX_WAIT_TIME_SECONDS: i32 = 20;

    pub const APPROXIMATE_NUMBER_OF_MESSAGES: &str = "ApproximateNumberOfMessages";

    /// One message per receive: the caller only ever gets one body back, so receiving more
    /// would delete messages nobody sees.
    pub const RECEIVE_BATCH_SIZE: i32 = 1;
    pub const DEFAULT_WAIT_TIME_SECONDS: i32 = 3;

    /// `YYYYMMDDHHMMSS.mmm`
    pub const DEDUPLICATION_ID_FORMAT: &str = "%Y%m%d%H%M%S%.3f";
}

pub mod responses {
    pub const SEND_SUCCESS: &str = "Success. Please Receive.";
    pub const EMPTY_QUEUE: &str = "Empty.";
}
