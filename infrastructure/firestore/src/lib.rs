pub mod client;
pub mod credentials;
pub mod document;
pub mod token;
pub mod club {
    pub mod entity;
    pub mod repository;
}
pub mod membership {
    pub mod entity;
    pub mod repository;
}
pub mod person {
    pub mod entity;
    pub mod repository;
}
pub mod university {
    pub mod entity;
    pub mod repository;
}
