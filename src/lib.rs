pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_bus;
        pub mod record_store;
    }
}

pub mod modules {
    pub mod records {
        pub mod core {
            pub mod entity;
            pub mod event;
            pub mod event_sync;
            pub mod location;
            pub mod notification;
            pub mod participant;
            pub mod user;
        }
        pub mod use_cases {
            pub mod manage_records {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod fixture;
            }
        }
    }
}

pub mod shell;
