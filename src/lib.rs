pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod formatting;
        pub mod primitives;
        pub mod validation;
    }
    pub mod application {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod entity_store;
        pub mod http;
    }
}

pub mod modules {
    pub mod clients {
        pub mod core {
            pub mod client;
        }
        pub mod use_cases {
            pub mod manage_clients {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod projects {
        pub mod core {
            pub mod project;
        }
        pub mod use_cases {
            pub mod manage_projects {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod tasks {
        pub mod core {
            pub mod task;
        }
        pub mod use_cases {
            pub mod manage_tasks {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod invoices {
        pub mod core {
            pub mod invoice;
            pub mod line_items;
        }
        pub mod use_cases {
            pub mod manage_invoices {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod time_tracking {
        pub mod core {
            pub mod decide;
            pub mod state;
            pub mod summaries;
        }
        pub mod use_cases {
            pub mod track_time {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod report_time {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
    pub mod dashboard {
        pub mod core {
            pub mod details;
            pub mod snapshot;
        }
        pub mod use_cases {
            pub mod get_dashboard {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_details {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
