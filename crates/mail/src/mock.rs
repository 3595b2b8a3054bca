use mockall::mock;

use crate::SendStatus;

// Mock dispatcher for workflow tests
mock! {
    pub MailDispatcher {
        pub async fn send_one(
            &self,
            to: String,
            subject: String,
            html: String,
        ) -> eyre::Result<SendStatus>;

        pub async fn send_batch(
            &self,
            addresses: Vec<String>,
            subject: String,
            body: String,
        ) -> eyre::Result<SendStatus>;
    }
}
