use super::Clients;
use ypprobe_application::services::DeadlineGovernor;
use ypprobe_application::use_cases::{DumpMapUseCase, ListMapsUseCase, WhoamiUseCase};
use ypprobe_domain::Config;

pub struct UseCases {
    pub dump_map: DumpMapUseCase,
    pub list_maps: ListMapsUseCase,
    pub whoami: WhoamiUseCase,
}

impl UseCases {
    pub fn new(clients: &Clients, config: &Config) -> Self {
        let governor = DeadlineGovernor::from_config(&config.timeouts);

        Self {
            dump_map: DumpMapUseCase::new(clients.yp.clone(), governor),
            list_maps: ListMapsUseCase::new(clients.yp.clone(), governor),
            whoami: WhoamiUseCase::new(
                clients.bootparam.clone(),
                clients.resolver.clone(),
                governor,
            ),
        }
    }
}
