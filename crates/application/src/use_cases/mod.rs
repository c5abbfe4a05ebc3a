pub mod dns;
pub mod health;
pub mod records;

pub use dns::{Resolution, ResolveQueryUseCase};
pub use health::GetHealthUseCase;
pub use records::{
    AddRecordsUseCase, DeleteRecordsUseCase, GetRecordUseCase, GetRecordsByAddressUseCase,
    GetRecordsByDomainUseCase, ListRecordsUseCase, UpdateRecordUseCase,
};
