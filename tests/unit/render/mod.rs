mod rasterizer;
mod surface;
