pub mod assets {
    pub mod interfaces;
    pub mod service;
}

pub mod auth {
    pub mod interfaces;
}

pub mod exif {
    pub mod interfaces;
    pub mod service;
}

pub mod people {
    pub mod interfaces;
    pub mod service;
}

pub mod preferences {
    pub mod error;
    pub mod interfaces;
    pub mod service;
}

pub mod tags {
    pub mod interfaces;
    pub mod service;
}

pub mod users {
    pub mod interfaces;
    pub mod service;
}
