mod course;
mod export_manifest;
mod id_maps;
mod import_status;
mod record_id;
