mod mapper;

pub(crate) use mapper::to_probe_config;
