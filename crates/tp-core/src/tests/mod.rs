mod csv_frame;
