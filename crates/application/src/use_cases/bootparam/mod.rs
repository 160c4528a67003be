mod whoami;

pub use whoami::WhoamiUseCase;
