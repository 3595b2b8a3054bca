use mockall::mock;
use seenfit_core::models::class::ClassFields;
use uuid::Uuid;

use crate::models::{DbBooking, DbBookingWithClass, DbClass};
use crate::repositories::signup::SignupInsert;

// Mock repositories for testing
mock! {
    pub ClassRepo {
        pub async fn create_class(&self, fields: ClassFields) -> eyre::Result<DbClass>;

        pub async fn get_class_by_id(&self, id: Uuid) -> eyre::Result<Option<DbClass>>;

        pub async fn list_upcoming_classes(&self) -> eyre::Result<Vec<DbClass>>;

        pub async fn update_class(
            &self,
            id: Uuid,
            fields: ClassFields,
        ) -> eyre::Result<Option<DbClass>>;

        pub async fn delete_class(&self, id: Uuid) -> eyre::Result<bool>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            class_id: Uuid,
            customer_name: String,
            customer_email: String,
            customer_phone: Option<String>,
        ) -> eyre::Result<DbBooking>;

        pub async fn create_booking_if_capacity(
            &self,
            class_id: Uuid,
            customer_name: String,
            customer_email: String,
            customer_phone: Option<String>,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn list_bookings(
            &self,
            class_id: Option<Uuid>,
        ) -> eyre::Result<Vec<DbBookingWithClass>>;

        pub async fn cancel_booking(&self, id: Uuid) -> eyre::Result<Option<DbBooking>>;
    }
}

mock! {
    pub SignupRepo {
        pub async fn insert_signup(&self, email: String) -> eyre::Result<SignupInsert>;

        pub async fn count_subscribers(&self) -> eyre::Result<i64>;

        pub async fn list_subscriber_emails(&self) -> eyre::Result<Vec<String>>;
    }
}
