mod dashboard;
mod timeline;
mod workload;
