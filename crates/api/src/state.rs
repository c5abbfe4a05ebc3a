use ferrous_zone_application::use_cases::{
    AddRecordsUseCase, DeleteRecordsUseCase, GetHealthUseCase, GetRecordUseCase,
    GetRecordsByAddressUseCase, GetRecordsByDomainUseCase, ListRecordsUseCase,
    UpdateRecordUseCase,
};
use ferrous_zone_infrastructure::dns::DnsServerController;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub add_records: Arc<AddRecordsUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
    pub get_record: Arc<GetRecordUseCase>,
    pub get_records_by_domain: Arc<GetRecordsByDomainUseCase>,
    pub get_records_by_address: Arc<GetRecordsByAddressUseCase>,
    pub update_record: Arc<UpdateRecordUseCase>,
    pub delete_records: Arc<DeleteRecordsUseCase>,
    pub get_health: Arc<GetHealthUseCase>,
    pub dns_server: Arc<DnsServerController>,
}
