pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod item {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod patch;
        pub mod replace;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod item {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod patch;
            pub mod replace;
        }
    }
}
